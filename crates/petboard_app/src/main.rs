mod platform;

fn main() -> std::io::Result<()> {
    platform::run_app()
}
