use leptos::prelude::*;

use crate::pages::record::{CATEGORY, PRODUCT};
use crate::sample::{Activity, StatCard, RECENT_ACTIVITY, STAT_CARDS};

/// Landing page: quick links, headline numbers and recent activity.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard">
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <div class="flex gap-4">
                    <a href=PRODUCT.new_href() class="btn btn-primary btn-sm">"+ Add Product"</a>
                    <a href=CATEGORY.new_href() class="btn btn-secondary btn-sm">"+ Add Category"</a>
                </div>
            </div>

            <div class="dashboard-content">
                <div class="stats-grid">
                    {STAT_CARDS.iter().map(|card| view! { <StatCardView card=*card/> }).collect::<Vec<_>>()}
                </div>

                <div class="recent-activity">
                    <h2>"Recent Activity"</h2>
                    <div class="alert alert-info mb-6">
                        <strong>"Coming Soon:"</strong>
                        " Activity feed will be implemented in future tasks."
                    </div>
                    <div class="space-y-4">
                        {RECENT_ACTIVITY
                            .iter()
                            .map(|activity| view! { <ActivityCard activity=*activity/> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatCardView(card: StatCard) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h3>{card.title}</h3>
            <p>{card.value}</p>
            <div class=card.note_class>
                {card.trend.map(|trend| view! { <span class="text-success">{trend}</span> })}
                {card.note}
            </div>
        </div>
    }
}

#[component]
fn ActivityCard(activity: Activity) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-body">
                <div class="flex justify-between items-start">
                    <div>
                        <h4 class="font-semibold mb-2">{activity.title}</h4>
                        <p class="text-secondary mb-0">{activity.description}</p>
                    </div>
                    <span class=activity.badge_class>{activity.age}</span>
                </div>
            </div>
        </div>
    }
}
