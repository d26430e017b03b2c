fn main() {
    nexus::app::cli::run();
}
