fn main() {
    println!("cargo:rerun-if-changed=assets/planet.ico");

    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "Solar System Explorer");
        if std::path::Path::new("assets/planet.ico").exists() {
            res.set_icon("assets/planet.ico");
        }
        res.compile().expect("Failed to compile Windows resources");
    }
}
