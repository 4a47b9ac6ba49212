//! Basic usage of the posix-facl builder.
//!
//! This example shows the command each operation produces, then runs a real
//! `getfacl` invocation when the ACL tooling is installed.
//!
//! Run with: `cargo run --example basic_usage`

use posix_facl::{AclError, Facl, SystemRunner};

fn main() -> Result<(), AclError> {
    // Step 1: inspect the generated commands with an echo runner.
    let echo = Facl::new(|command: &str| -> Result<String, AclError> { Ok(command.to_string()) });

    println!("read:    {}", echo.read(&["/tmp"], false)?);
    println!("wipe:    {}", echo.wipe(&["/tmp/a", "/tmp/b"], true)?);
    println!("modify:  {}", echo.modify("user", "nobody", "r-x", &["/tmp"], false)?);
    println!("delete:  {}", echo.delete("d:group", "users", &["/tmp"], true)?);

    // Step 2: run against the real tools, if present.
    if SystemRunner::tools_available() {
        let facl = Facl::new(SystemRunner::new());
        println!("installed ACL tooling: {}", facl.version()?);
        println!("{}", facl.read(&["/tmp"], false)?);
    } else {
        println!("getfacl/setfacl not found on PATH; skipping live invocation");
    }

    Ok(())
}
