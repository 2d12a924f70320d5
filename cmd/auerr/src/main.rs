//! Audit error-number translator.
//!
//! Resolves a BSM error octet from an audit record to the local errno
//! and its description, or a local errno back to the BSM octet it would
//! be recorded as.
//!
//! Usage:
//!
//! ```text
//! auerr <bsm-code>      BSM octet -> local errno + description
//! auerr -e <errno>      local errno -> BSM octet
//! ```

use bsm_errno::{bsm_to_errno, errno_to_bsm, strerror, BsmErrno};

fn usage() -> ! {
    eprintln!("usage: auerr <bsm-code>      resolve a BSM error octet (0-255)");
    eprintln!("       auerr -e <errno>      resolve a local errno value");
    std::process::exit(2);
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [flag, value] if flag == "-e" => {
            let errno: i32 = match value.parse() {
                Ok(n) => n,
                Err(_) => usage(),
            };
            let bsm = errno_to_bsm(errno);
            println!("errno {} -> bsm {}", errno, bsm);
        }
        [value] if value != "-h" && value != "--help" => {
            let code = match value.parse::<u8>() {
                Ok(n) => BsmErrno::new(n),
                Err(_) => usage(),
            };
            match bsm_to_errno(code) {
                Ok(errno) => {
                    println!("bsm {} -> errno {} ({})", code, errno, strerror(code));
                }
                Err(err) => {
                    eprintln!("bsm {}: {} ({})", code, err, strerror(code));
                    std::process::exit(1);
                }
            }
        }
        _ => usage(),
    }
}
