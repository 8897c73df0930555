use intervalwalk_core::{CapabilityError, Notifier};

/// Desktop notifications through the platform notification service.
///
/// Permission is the `notifications.enabled` config flag; nothing prompts.
pub struct DesktopNotifier {
    permitted: bool,
}

impl DesktopNotifier {
    pub fn new(permitted: bool) -> Self {
        Self { permitted }
    }
}

impl Notifier for DesktopNotifier {
    fn is_permission_granted(&self) -> bool {
        self.permitted
    }

    fn show(&mut self, title: &str, body: &str) -> Result<(), CapabilityError> {
        notify_rust::Notification::new()
            .summary(title)
            .body(body)
            .appname("intervalwalk")
            .icon("alarm-clock")
            .show()
            .map(|_| ())
            .map_err(|e| CapabilityError::failed("desktop notification", e))
    }
}
