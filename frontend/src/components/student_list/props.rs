use yew::{Callback, Properties};

use crate::app::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct StudentListProps {
    pub on_navigate: Callback<Route>,
}
