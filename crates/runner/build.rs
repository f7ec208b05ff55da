//! Build script for PointerHelper
//! Embeds Windows resource metadata

fn main() {
    #[cfg(windows)]
    {
        let mut res = winresource::WindowsResource::new();
        res.set("FileDescription", "PointerHelper input hook engine");
        res.set("ProductName", "PointerHelper");
        res.set("InternalName", "PointerHelper");
        res.set("OriginalFilename", "PointerHelper.exe");

        if let Err(e) = res.compile() {
            println!("cargo:warning=Failed to compile Windows resources: {}", e);
        }
    }
}
