/// How long a toast stays up unless replaced.
pub const TOAST_DURATION_MS: u64 = 1600;

/// Transient status line. Each `show` bumps `seq` so a stale timer only
/// clears the message it was started for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastVm {
    pub message: String,
    seq: u64,
}

impl ToastVm {
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.message = message.into();
        self.seq = self.seq.wrapping_add(1);
        self.seq
    }

    pub fn clear_if(&mut self, seq: u64) {
        if self.seq == seq {
            self.message.clear();
        }
    }
}
