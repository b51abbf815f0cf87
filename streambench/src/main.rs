fn main() -> anyhow::Result<()> {
    streambench::run()
}
