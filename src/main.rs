use gitdrop::{cli, ui};

#[tokio::main]
async fn main() {
    if let Err(err) = cli::run().await {
        ui::output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
