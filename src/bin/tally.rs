// Tally CLI binary: thin wrapper over the shared cli module
// Usage: cargo run --bin tally -- report <path>

fn main() {
    tally::cli::run();
}
