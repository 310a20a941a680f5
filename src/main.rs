use driftfield::Viewer;

fn main() {
    if let Err(e) = Viewer::new().with_title("driftfield backdrop").run() {
        eprintln!("Viewer error: {}", e);
        std::process::exit(1);
    }
}
