mod cli;

fn main() {
    cli::run(cli::parse());
}
