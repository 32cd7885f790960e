fn main() {
    pss::cli::run();
}
