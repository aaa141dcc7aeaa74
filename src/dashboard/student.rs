use chrono::Local;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use log::{error, info};

use crate::api;
use crate::components::notification::{Toast, ToastMessage};
use crate::config::RECENT_ACTIVITY_LIMIT;
use crate::dashboard::recommendations::PersonalizedRecommendations;
use crate::models::{Course, ProgressRecord, User};
use crate::progress::ProgressSummary;

#[derive(Properties, PartialEq)]
pub struct StudentDashboardProps {
    pub user: User,
}

fn difficulty_stars(level: u8) -> Html {
    html! {
        <span class="difficulty">
            { for (1..=5u8).map(|star| html! {
                <span class={classes!("star", (star <= level).then_some("filled"))}>{"★"}</span>
            }) }
        </span>
    }
}

#[function_component]
pub fn StudentDashboard(props: &StudentDashboardProps) -> Html {
    let courses = use_state(Vec::<Course>::new);
    let progress = use_state(Vec::<ProgressRecord>::new);
    let loading = use_state(|| true);
    let toast = use_state(|| None::<ToastMessage>);

    {
        let courses = courses.clone();
        let progress = progress.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let user = props.user.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let age_group = user.age_group.clone().unwrap_or_default();
                    let mut failed = false;

                    match api::fetch_courses(&age_group).await {
                        Ok(data) => {
                            info!("Loaded {} courses for age group {}", data.len(), age_group);
                            courses.set(data);
                        }
                        Err(e) => {
                            error!("Error fetching courses: {}", e);
                            failed = true;
                        }
                    }

                    match api::fetch_progress(&user.id).await {
                        Ok(data) => progress.set(data),
                        Err(e) => {
                            error!("Error fetching progress: {}", e);
                            failed = true;
                        }
                    }

                    if failed {
                        toast.set(Some(ToastMessage::error(
                            "Couldn't load everything",
                            "Some of your dashboard could not be loaded. Please try again later.",
                        )));
                    }
                    loading.set(false);
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

    // The recommendations card reports into the same slot; the newest toast wins.
    let show_toast = {
        let toast = toast.clone();
        Callback::from(move |message: ToastMessage| toast.set(Some(message)))
    };

    if *loading {
        return html! {
            <div class="dashboard-loading"><span class="loading-spinner"></span></div>
        };
    }

    let summary = ProgressSummary::new(&progress);
    let user = &props.user;

    html! {
        <div class="dashboard-container">
            <div class="dashboard-header">
                <h1>{format!("Welcome back, {}! 🎉", user.display_first_name())}</h1>
                <p>{"Ready to continue your coding journey? Let's learn something amazing today!"}</p>
            </div>

            <div class="summary-cards">
                <div class="summary-card">
                    <div class="summary-title">{"Courses Enrolled"}</div>
                    <div class="summary-value">{summary.enrolled_count()}</div>
                    <div class="summary-note">{"Keep exploring new topics!"}</div>
                </div>
                <div class="summary-card">
                    <div class="summary-title">{"Certificates Earned"}</div>
                    <div class="summary-value">{summary.certificate_count()}</div>
                    <div class="summary-note">{"Great achievements!"}</div>
                </div>
                <div class="summary-card">
                    <div class="summary-title">{"Average Progress"}</div>
                    <div class="summary-value">{format!("{}%", summary.average_progress())}</div>
                    <div class="summary-note">{"You're doing amazing!"}</div>
                </div>
            </div>

            if let Some(age_group) = user.age_group.as_ref() {
                <span class="badge age-badge">{format!("Age Group: {} years", age_group)}</span>
            }

            <h2>{"Available Courses for You"}</h2>
            if courses.is_empty() {
                <div class="empty-state">
                    {"No courses available for your age group yet. Check back soon for new content!"}
                </div>
            } else {
                <div class="course-grid">
                    { for courses.iter().map(|course| {
                        let course_progress = summary.progress_for_course(&course.id);
                        let enrolled = summary.is_enrolled(&course.id);
                        html! {
                            <div class="course-card" key={course.id.clone()}>
                                <div class="course-card-header">
                                    <h3>{&course.title}</h3>
                                    <span class={classes!("badge", enrolled.then_some("badge-enrolled"))}>
                                        { if enrolled { "Enrolled" } else { "Available" } }
                                    </span>
                                </div>
                                <p>{&course.description}</p>
                                <div class="course-difficulty">
                                    {"Difficulty: "}{difficulty_stars(course.difficulty_level)}
                                </div>
                                if enrolled {
                                    <div class="course-progress">
                                        <div class="course-progress-label">
                                            <span>{"Progress"}</span>
                                            <span>{format!("{}%", course_progress)}</span>
                                        </div>
                                        <div class="progress-bar">
                                            <div class="progress-fill" style={format!("width: {}%;", course_progress)}></div>
                                        </div>
                                    </div>
                                }
                                <button class={classes!("course-action", enrolled.then_some("primary"))}>
                                    { if enrolled { "▶ Continue Learning" } else { "▶ Start Course" } }
                                </button>
                            </div>
                        }
                    }) }
                </div>
            }

            if summary.enrolled_count() > 0 {
                <h2>{"Your Recent Activity"}</h2>
                <div class="activity-list">
                    { for summary.recent_activity(&courses, RECENT_ACTIVITY_LIMIT).into_iter().map(|entry| {
                        let last_accessed = entry.record.last_accessed
                            .map(|t| t.with_timezone(&Local).format("%b %-d, %Y").to_string())
                            .unwrap_or_else(|| "never".to_string());
                        html! {
                            <div class="activity-item">
                                <div>
                                    <h3>{entry.title()}</h3>
                                    <div class="activity-meta">{format!("🕒 Last accessed: {}", last_accessed)}</div>
                                </div>
                                <div class="activity-progress">
                                    <div class="summary-value">{format!("{}%", entry.record.progress_percentage)}</div>
                                    <div class="summary-note">{"Complete"}</div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }

            <PersonalizedRecommendations user={user.clone()} on_toast={show_toast} />
            <Toast message={(*toast).clone()} on_dismiss={dismiss_toast} />
        </div>
    }
}
