use async_std::sync::Arc;
use async_std::task;
use log::debug;
use std::time::Duration;

use crate::view::{Message, View};

// The single transient message region. Every message schedules its own hide; earlier timers are
// never cancelled, so a newer message may disappear when an older timer fires.
pub struct MessageBoard<V> {
  _view: Arc<V>,
  _hide_after: Duration,
}

impl<V> MessageBoard<V>
where
  V: View,
{
  pub fn new(view: Arc<V>, hide_after: Duration) -> Self {
    MessageBoard {
      _view: view,
      _hide_after: hide_after,
    }
  }

  pub fn show(&self, message: Message) {
    debug!("showing {:?} message '{}'", message.level, message.text);
    self._view.show_message(&message);

    let view = self._view.clone();
    let delay = self._hide_after;
    task::spawn(async move {
      task::sleep(delay).await;
      view.hide_message();
    });
  }
}
