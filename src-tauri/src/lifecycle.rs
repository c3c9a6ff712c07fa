use crate::MAIN_WINDOW_LABEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// macOS apps stay alive with zero windows until the user quits explicitly.
    pub fn keeps_running_without_windows(self) -> bool {
        matches!(self, Self::MacOs)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    NotReady,
    ReadyNoWindow,
    ReadyWithWindows,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleCommand {
    CreateWindow { label: String },
    ShowWindow { label: String },
}

/// Whether the process should terminate. Quitting is left to the host so the
/// controller never issues a second exit while one is already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    Exit,
    KeepRunning,
}

#[derive(Debug, Clone)]
struct WindowSlot {
    label: String,
    visible: bool,
}

/// Process-level window lifecycle.
///
/// The controller never talks to the host runtime. Host events go in through
/// the `on_*` methods; window commands and exit decisions are executed by the
/// caller, which keeps every transition testable without a display server.
#[derive(Debug)]
pub struct LifecycleController {
    platform: Platform,
    phase: LifecyclePhase,
    windows: Vec<WindowSlot>,
    windows_created: usize,
}

impl LifecycleController {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            phase: LifecyclePhase::NotReady,
            windows: Vec::new(),
            windows_created: 0,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn open_window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn is_window_visible(&self, label: &str) -> Option<bool> {
        self.slot(label).map(|slot| slot.visible)
    }

    /// Must run before `on_ready`; a present installer signal pre-empts readiness.
    pub fn on_startup_signal(&mut self, present: bool) -> ExitDecision {
        if self.phase != LifecyclePhase::NotReady || !present {
            return ExitDecision::KeepRunning;
        }

        self.phase = LifecyclePhase::Terminated;
        ExitDecision::Exit
    }

    pub fn on_ready(&mut self) -> Option<LifecycleCommand> {
        if self.phase != LifecyclePhase::NotReady {
            return None;
        }

        self.phase = LifecyclePhase::ReadyNoWindow;
        self.create_window()
    }

    /// Allocates a hidden window slot. The window only becomes visible through
    /// `on_window_ready_to_show`.
    pub fn create_window(&mut self) -> Option<LifecycleCommand> {
        if matches!(
            self.phase,
            LifecyclePhase::NotReady | LifecyclePhase::Terminated
        ) {
            return None;
        }

        let label = self.next_window_label();
        self.windows_created += 1;
        self.windows.push(WindowSlot {
            label: label.clone(),
            visible: false,
        });
        self.phase = LifecyclePhase::ReadyWithWindows;
        Some(LifecycleCommand::CreateWindow { label })
    }

    pub fn on_window_ready_to_show(&mut self, label: &str) -> Option<LifecycleCommand> {
        if self.phase == LifecyclePhase::Terminated {
            return None;
        }

        let slot = self.windows.iter_mut().find(|slot| slot.label == label)?;
        if slot.visible {
            return None;
        }

        slot.visible = true;
        Some(LifecycleCommand::ShowWindow {
            label: label.to_string(),
        })
    }

    /// Returns whether the label belonged to a tracked window.
    pub fn on_window_destroyed(&mut self, label: &str) -> bool {
        let before = self.windows.len();
        self.windows.retain(|slot| slot.label != label);
        let removed = self.windows.len() != before;

        if removed && self.windows.is_empty() && self.phase == LifecyclePhase::ReadyWithWindows {
            self.phase = LifecyclePhase::ReadyNoWindow;
        }
        removed
    }

    pub fn on_window_creation_failed(&mut self, label: &str) {
        self.on_window_destroyed(label);
    }

    pub fn on_all_windows_closed(&mut self) -> ExitDecision {
        match self.phase {
            LifecyclePhase::NotReady => return ExitDecision::KeepRunning,
            LifecyclePhase::Terminated => return ExitDecision::Exit,
            LifecyclePhase::ReadyNoWindow | LifecyclePhase::ReadyWithWindows => {}
        }

        self.windows.clear();
        if self.platform.keeps_running_without_windows() {
            self.phase = LifecyclePhase::ReadyNoWindow;
            return ExitDecision::KeepRunning;
        }

        self.phase = LifecyclePhase::Terminated;
        ExitDecision::Exit
    }

    pub fn on_activate(&mut self) -> Option<LifecycleCommand> {
        if self.phase != LifecyclePhase::ReadyNoWindow || !self.windows.is_empty() {
            return None;
        }

        self.create_window()
    }

    /// `explicit` is true when the exit was requested with a code (an app
    /// `exit` call or the system quit action) rather than by the last window
    /// closing.
    pub fn on_exit_requested(&mut self, explicit: bool) -> ExitDecision {
        if explicit || self.phase == LifecyclePhase::Terminated {
            self.phase = LifecyclePhase::Terminated;
            return ExitDecision::Exit;
        }

        self.on_all_windows_closed()
    }

    fn slot(&self, label: &str) -> Option<&WindowSlot> {
        self.windows.iter().find(|slot| slot.label == label)
    }

    fn next_window_label(&self) -> String {
        if self.windows_created == 0 {
            MAIN_WINDOW_LABEL.to_string()
        } else {
            format!("{MAIN_WINDOW_LABEL}-{}", self.windows_created)
        }
    }
}
