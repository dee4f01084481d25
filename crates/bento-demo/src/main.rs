#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = bento_demo::run_from_env() {
        tracing::error!(target: "bento.demo", %error, "demo failed");
        eprintln!("{error}");
        std::process::exit(error.exit_code());
    }
}
