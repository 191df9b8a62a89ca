use yew::{Callback, Properties};

use crate::app::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct StudentFormProps {
    /// `Some(id)` puts the form in edit mode and triggers a prefetch of that
    /// record on first render; `None` starts an empty create form.
    #[prop_or_default]
    pub student_id: Option<String>,
    pub on_navigate: Callback<Route>,
}
