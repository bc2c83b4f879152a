fn main() {
    tapctl::app::cli::run();
}
