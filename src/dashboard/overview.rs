use serde_json::Value;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::notification::{Toast, ToastMessage};
use crate::models::User;

/// Flattens the stats object into (label, value) pairs, sorted by label.
/// `total_users` becomes `Total Users`.
pub fn stat_tiles(stats: &Value) -> Vec<(String, String)> {
    let Value::Object(fields) = stats else {
        return Vec::new();
    };
    let mut tiles: Vec<(String, String)> = fields
        .iter()
        .map(|(key, value)| {
            let label = key
                .split('_')
                .filter(|word| !word.is_empty())
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                        None => String::new(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Null => "-".to_string(),
                other => other.to_string(),
            };
            (label, value)
        })
        .collect();
    tiles.sort();
    tiles
}

#[derive(Properties, PartialEq)]
pub struct OverviewProps {
    pub user: User,
}

/// Parent, teacher and admin landing view: the platform stats as tiles.
#[function_component]
pub fn RoleOverview(props: &OverviewProps) -> Html {
    let stats = use_state(|| None::<Value>);
    let toast = use_state(|| None::<ToastMessage>);

    {
        let stats = stats.clone();
        let toast = toast.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_dashboard_stats().await {
                        Ok(data) => stats.set(Some(data)),
                        Err(e) => {
                            log::error!("Error fetching dashboard stats: {}", e);
                            stats.set(Some(Value::Null));
                            toast.set(Some(ToastMessage::error("Unable to load stats", &e.to_string())));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    let user = &props.user;

    html! {
        <div class="dashboard-container">
            <div class="dashboard-header">
                <h1>{format!("Welcome back, {}!", user.display_first_name())}</h1>
                <p>{format!("{} dashboard", user.role.label())}</p>
            </div>
            {
                match stats.as_ref() {
                    None => html! { <div class="dashboard-loading"><span class="loading-spinner"></span></div> },
                    Some(value) => {
                        let tiles = stat_tiles(value);
                        if tiles.is_empty() {
                            html! { <div class="empty-state">{"No statistics available yet."}</div> }
                        } else {
                            html! {
                                <div class="summary-cards">
                                    { for tiles.into_iter().map(|(label, value)| html! {
                                        <div class="summary-card" key={label.clone()}>
                                            <div class="summary-title">{label}</div>
                                            <div class="summary-value">{value}</div>
                                        </div>
                                    }) }
                                </div>
                            }
                        }
                    }
                }
            }
            <Toast message={(*toast).clone()} on_dismiss={dismiss_toast} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_fields_become_labelled_tiles() {
        let tiles = stat_tiles(&json!({
            "total_users": 120,
            "active_courses": "14",
            "average_score": 87.5,
            "last_sync": null
        }));
        assert_eq!(
            tiles,
            vec![
                ("Active Courses".to_string(), "14".to_string()),
                ("Average Score".to_string(), "87.5".to_string()),
                ("Last Sync".to_string(), "-".to_string()),
                ("Total Users".to_string(), "120".to_string()),
            ]
        );
    }

    #[test]
    fn non_objects_render_nothing() {
        assert!(stat_tiles(&Value::Null).is_empty());
        assert!(stat_tiles(&json!([1, 2, 3])).is_empty());
    }
}
