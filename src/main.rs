fn main() -> anyhow::Result<()> {
    wd_tui::bootstrap::run()
}
