/// Open modals, most recent last.
///
/// Scroll stays locked while any modal is open. Escape closes the top
/// one.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct ModalStack {
  open: Vec<String>
}

impl ModalStack {
  pub fn is_open(
    &self,
    id: &str
  ) -> bool {
    self.open.iter().any(|open| open == id)
  }

  pub fn scroll_locked(&self) -> bool {
    !self.open.is_empty()
  }

  /// Returns false if the modal was already open.
  pub fn open(
    &mut self,
    id: &str
  ) -> bool {
    if self.is_open(id) {
      return false;
    }
    self.open.push(id.to_string());
    tracing::debug!(
      modal = id,
      depth = self.open.len(),
      "opened modal"
    );
    true
  }

  pub fn close(
    &mut self,
    id: &str
  ) -> bool {
    let before = self.open.len();
    self.open.retain(|open| open != id);
    let closed = self.open.len() != before;
    if closed {
      tracing::debug!(
        modal = id,
        depth = self.open.len(),
        "closed modal"
      );
    }
    closed
  }

  pub fn close_top(
    &mut self
  ) -> Option<String> {
    self.open.pop()
  }
}

/// Ties a modal to a route that opens it. Once the modal has been
/// seen open on that route, closing it means the route should be left.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default,
)]
pub struct ModalRoute {
  seen_open: bool
}

impl ModalRoute {
  /// Feeds the current route match and modal state. Returns true when
  /// the caller should navigate away from the route.
  pub fn observe(
    &mut self,
    on_route: bool,
    open: bool
  ) -> bool {
    if !on_route {
      self.seen_open = false;
      return false;
    }
    if open {
      self.seen_open = true;
      return false;
    }
    std::mem::take(&mut self.seen_open)
  }
}

#[cfg(test)]
mod tests {
  use super::{
    ModalRoute,
    ModalStack
  };

  #[test]
  fn open_close_cycle() {
    let mut modals = ModalStack::default();
    assert!(modals.open("nova-rotina"));
    assert!(!modals.open("nova-rotina"));
    assert!(modals.scroll_locked());
    assert!(modals.close("nova-rotina"));
    assert!(!modals.close("nova-rotina"));
    assert!(!modals.scroll_locked());
  }

  #[test]
  fn escape_closes_most_recent_first() {
    let mut modals = ModalStack::default();
    modals.open("a");
    modals.open("b");
    assert_eq!(
      modals.close_top().as_deref(),
      Some("b")
    );
    assert!(modals.scroll_locked());
    assert!(modals.is_open("a"));
    modals.close_top();
    assert_eq!(modals.close_top(), None);
  }

  #[test]
  fn closing_a_routed_modal_leaves_the_route() {
    let mut route = ModalRoute::default();
    // Entering the route renders once before the modal opens.
    assert!(!route.observe(true, false));
    assert!(!route.observe(true, true));
    assert!(route.observe(true, false));
    // Only once per opening.
    assert!(!route.observe(true, false));

    assert!(!route.observe(true, true));
    assert!(!route.observe(false, false));
    assert!(!route.observe(true, false));
  }
}
