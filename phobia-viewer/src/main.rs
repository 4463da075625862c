fn main() {
    if let Err(err) = phobia_viewer::run() {
        phobia_viewer::report_startup_error(&err);
    }
}
