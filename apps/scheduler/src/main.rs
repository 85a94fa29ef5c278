fn main() -> anyhow::Result<()> {
    word_scheduler::run()
}
