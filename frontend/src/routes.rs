use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::compare_page::ComparePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    ComparePage {},
}
