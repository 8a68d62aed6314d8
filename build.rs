use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Cargar variables desde .env si existe y pasarlas como rustc-env para
    // que config.rs las lea con option_env! (THALAMUS_SERVER_*, ENVIRONMENT,
    // DEFAULT_COUNTRY, ENABLED_ROUTES, ...)
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    // El entorno real tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}
