use std::fs;
use std::io;
use std::path::Path;

const PLACEHOLDER_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Bilal Ayub &amp; Co.</title></head>
<body>
<p>The site bundle has not been built yet. Run <code>trunk build --release</code> in <code>frontend/</code> and rebuild the server.</p>
</body>
</html>
"#;

fn main() -> io::Result<()> {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir)?;
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .map_err(|e| io::Error::other(e.to_string()))?;
    } else {
        // include_dir! needs the directory to exist even before the first frontend build.
        let embedded = out_dir.join("dist");
        fs::create_dir_all(&embedded)?;
        let index = embedded.join("index.html");
        if !index.exists() {
            fs::write(index, PLACEHOLDER_INDEX)?;
        }
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
    Ok(())
}
