use crossterm::event::KeyCode;

/// Subscriptions represent inputs that an app wants to receive.
/// They are registered via the subscriptions() function.
pub enum Subscription<Msg> {
    /// Subscribe to a specific keyboard key
    Keyboard {
        key: KeyCode,
        msg: Msg,
        description: String,
    },

    /// Receive every key no keyboard subscription claimed (text entry)
    Input {
        handler: Box<dyn Fn(KeyCode) -> Option<Msg> + Send>,
    },
}

impl<Msg> Subscription<Msg> {
    /// Helper to create a keyboard subscription
    pub fn keyboard(key: KeyCode, description: impl Into<String>, msg: Msg) -> Self {
        Subscription::Keyboard {
            key,
            msg,
            description: description.into(),
        }
    }

    /// Helper to create a text input subscription
    pub fn input<F>(handler: F) -> Self
    where
        F: Fn(KeyCode) -> Option<Msg> + Send + 'static,
    {
        Subscription::Input {
            handler: Box::new(handler),
        }
    }
}
