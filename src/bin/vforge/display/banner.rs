use std::io::{self, Write};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const BANNER_ART: &str = r#"
   ██╗   ██╗ █████╗ ██╗     ███████╗███╗   ██╗ ██████╗███████╗
   ██║   ██║██╔══██╗██║     ██╔════╝████╗  ██║██╔════╝██╔════╝
   ██║   ██║███████║██║     █████╗  ██╔██╗ ██║██║     █████╗
   ╚██╗ ██╔╝██╔══██║██║     ██╔══╝  ██║╚██╗██║██║     ██╔══╝
    ╚████╔╝ ██║  ██║███████╗███████╗██║ ╚████║╚██████╗███████╗
     ╚═══╝  ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝  ╚═══╝ ╚═════╝╚══════╝
   ───────────────────────────────────────────────────────────
   "#;

pub fn print_banner() {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{BANNER_ART}");
    let _ = writeln!(
        stderr,
        "   Mixed-Valence Oxidation State Screening            v{VERSION}"
    );
    let _ = writeln!(stderr);
}
