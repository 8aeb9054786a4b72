// src/progress.rs
/// Progress reporting for long-running operations (catalogue + translation fetches).
/// The CLI implements this to surface status on stderr.
pub trait Progress {
    /// Called once the total number of plugins is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One plugin finished; `ok == false` means its stats could not be fetched.
    fn item_done(&mut self, _slug: &str, _ok: bool) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
