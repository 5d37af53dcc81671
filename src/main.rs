fn main() {
    compadcn::app::cli::run();
}
