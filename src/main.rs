fn main() {
    marketquantify::exit_on_failure(marketquantify::run());
}
