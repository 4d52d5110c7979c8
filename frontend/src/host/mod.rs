//! Browser implementations of the capabilities the view-models are driven through.

mod dialogs;
mod toast;

use common::navigation::{Navigator, Route};
use yew::Callback;

pub use dialogs::BrowserDialogs;
pub use toast::ToastNotifier;

/// Navigates by emitting the target route to the application shell.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteNavigator(pub Callback<Route>);

impl Navigator for RouteNavigator {
    fn navigate(&self, route: Route) {
        self.0.emit(route);
    }
}
