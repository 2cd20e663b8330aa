use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");

    // Stamp the firmware with the repo it was built from. If git is absent
    // (release tarball, sandboxed builder) the fields read "unknown".
    let branch = git(&["rev-parse", "--abbrev-ref", "HEAD"]);
    let hash = git(&["rev-parse", "--short", "HEAD"]);

    println!("cargo:rustc-env=ENCODER_GATE_GIT_BRANCH={branch}");
    println!("cargo:rustc-env=ENCODER_GATE_GIT_HASH={hash}");
}

fn git(args: &[&str]) -> String {
    match Command::new("git").args(args).output() {
        Ok(output) if output.status.success() => {
            let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if value.is_empty() {
                "unknown".into()
            } else {
                value
            }
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            println!("cargo:warning=git {} failed: {}", args.join(" "), stderr.trim());
            "unknown".into()
        }
        Err(_) => "unknown".into(),
    }
}
