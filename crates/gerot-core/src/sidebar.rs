#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum SidebarToggle {
  Opened { arm_outside_click: bool },
  Closed
}

/// Active flag for `#sidebar` / `#main-content` plus the one-shot
/// outside-click listener used on narrow viewports.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct SidebarState {
  active:              bool,
  pending_arm:         bool,
  outside_click_armed: bool
}

impl SidebarState {
  pub fn is_active(&self) -> bool {
    self.active
  }

  pub fn outside_click_armed(
    &self
  ) -> bool {
    self.outside_click_armed
  }

  pub fn toggle(
    &mut self,
    viewport_width: u32,
    breakpoint: u32
  ) -> SidebarToggle {
    self.active = !self.active;
    self.outside_click_armed = false;
    self.pending_arm = false;

    if !self.active {
      return SidebarToggle::Closed;
    }

    let narrow =
      viewport_width <= breakpoint;
    self.pending_arm = narrow;
    SidebarToggle::Opened {
      arm_outside_click: narrow
    }
  }

  /// Called after the arming delay. Does nothing if the sidebar was
  /// closed (or toggled again) in the meantime.
  pub fn arm_outside_click(
    &mut self
  ) -> bool {
    if !(self.active && self.pending_arm) {
      return false;
    }
    self.pending_arm = false;
    self.outside_click_armed = true;
    true
  }

  /// Returns true when the click closed the sidebar.
  pub fn outside_click(
    &mut self,
    inside: bool
  ) -> bool {
    if !self.outside_click_armed || inside
    {
      return false;
    }
    self.active = false;
    self.outside_click_armed = false;
    true
  }

  pub fn viewport_resized(
    &mut self,
    width: u32,
    breakpoint: u32
  ) -> bool {
    if width <= breakpoint {
      return false;
    }
    let was_active = self.active;
    self.active = false;
    self.pending_arm = false;
    self.outside_click_armed = false;
    was_active
  }
}
