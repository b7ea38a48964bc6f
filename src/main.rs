use log::error;

fn main() {
    rhost::init();

    let snapshot = rhost::snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize snapshot: {}", e);
            std::process::exit(1);
        }
    }
}
