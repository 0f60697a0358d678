// Mon Oct 19 2026 - Alex

use packet_wrapper_generator::ui;

fn main() {
    if let Err(e) = ui::cli::run() {
        ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
