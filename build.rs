const MANIFEST: &str = r#"
<assembly xmlns="urn:schemas-microsoft-com:asm.v1" manifestVersion="1.0">
<trustInfo xmlns="urn:schemas-microsoft-com:asm.v3">
    <security>
        <requestedPrivileges>
            <requestedExecutionLevel level="asInvoker" uiAccess="false" />
        </requestedPrivileges>
    </security>
</trustInfo>
</assembly>
"#;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }

    embed_manifest();
}

// The launcher must never elevate itself, only its target.
#[cfg(windows)]
fn embed_manifest() {
    let mut res = winres::WindowsResource::new();
    res.set_manifest(MANIFEST);

    if let Err(error) = res.compile() {
        println!("cargo:warning=Failed to embed application manifest: {error}");
    }
}

#[cfg(not(windows))]
fn embed_manifest() {
    let _ = MANIFEST;
    println!("cargo:warning=Cross-compiling for Windows: application manifest not embedded");
}
