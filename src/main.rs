fn main() {
    env_logger::init();

    if let Err(e) = pathfinder::solver() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
