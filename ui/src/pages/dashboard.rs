use payloads::responses::{DashboardStats, LabelCount};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use yew::prelude::*;

use crate::components::StatCard;
use crate::components::layout::PageHeader;
use crate::hooks::{use_dashboard_stats, use_title};
use crate::utils::format::{
    Trend, percent, rupees, rupees_compact, signed_count, signed_percent,
};

#[function_component]
pub fn DashboardPage() -> Html {
    use_title("Dashboard");
    let stats_hook = use_dashboard_stats();

    html! {
        <div>
            <PageHeader
                title="Dashboard"
                description="Overview of your coworking business"
            />
            {stats_hook.render("dashboard", |stats, _, _| html! {
                <DashboardContent stats={stats.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DashboardContentProps {
    stats: DashboardStats,
}

#[function_component]
fn DashboardContent(props: &DashboardContentProps) -> Html {
    let stats = &props.stats;

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                <StatCard
                    title="Total Revenue"
                    value={rupees_compact(stats.total_revenue)}
                    change={signed_percent(stats.revenue_change)}
                    trend={Trend::of(stats.revenue_change)}
                    caption="vs last month"
                    accent="bg-emerald-500"
                />
                <StatCard
                    title="Active Bookings"
                    value={stats.active_bookings.to_string()}
                    change={signed_percent(stats.bookings_change)}
                    trend={Trend::of(stats.bookings_change)}
                    caption="vs last month"
                    accent="bg-blue-500"
                />
                <StatCard
                    title="Total Spaces"
                    value={stats.total_spaces.to_string()}
                    change={signed_count(stats.spaces_change)}
                    trend={Trend::of(stats.spaces_change as f64)}
                    caption="new this month"
                    accent="bg-purple-500"
                />
                <StatCard
                    title="Occupancy Rate"
                    value={percent(stats.occupancy_rate)}
                    change={signed_percent(stats.occupancy_change)}
                    trend={Trend::of(stats.occupancy_change)}
                    caption="vs last month"
                    accent="bg-amber-500"
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <Panel title="Revenue Trend">
                    <RevenueBars stats={stats.clone()} />
                </Panel>
                <Panel title="Spaces by Type">
                    <CountBars items={stats.spaces_by_type.clone()} />
                </Panel>
                <Panel title="Bookings by City">
                    <CountBars items={stats.bookings_by_city.clone()} />
                </Panel>
                <Panel title="Top Performing Spaces">
                    <TopSpaces stats={stats.clone()} />
                </Panel>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PanelProps {
    title: AttrValue,
    children: Html,
}

#[function_component]
fn Panel(props: &PanelProps) -> Html {
    html! {
        <div class="bg-white rounded-lg border border-neutral-200 p-5">
            <h2 class="text-base font-semibold text-neutral-900 mb-4">{&props.title}</h2>
            {props.children.clone()}
        </div>
    }
}

/// Bar width in percent of the largest value.
fn share(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

fn no_data() -> Html {
    html! { <p class="text-sm text-neutral-500">{"No data yet"}</p> }
}

#[derive(Properties, PartialEq)]
struct StatsProps {
    stats: DashboardStats,
}

#[function_component]
fn RevenueBars(props: &StatsProps) -> Html {
    let trend = &props.stats.revenue_trend;
    if trend.is_empty() {
        return no_data();
    }
    let as_f64 = |d: Decimal| d.to_f64().unwrap_or_default();
    let max = trend.iter().map(|p| as_f64(p.revenue)).fold(0.0, f64::max);

    html! {
        <div class="flex items-end gap-3 h-48">
            {for trend.iter().map(|point| html! {
                <div class="flex-1 flex flex-col items-center justify-end h-full">
                    <span class="text-xs text-neutral-500 mb-1">
                        {rupees_compact(point.revenue)}
                    </span>
                    <div
                        class="w-full bg-emerald-500 rounded-t"
                        style={format!("height: {:.0}%", share(as_f64(point.revenue), max))}
                        title={rupees(point.revenue)}
                    ></div>
                    <span class="text-xs text-neutral-600 mt-1">{&point.month}</span>
                </div>
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CountBarsProps {
    items: Vec<LabelCount>,
}

#[function_component]
fn CountBars(props: &CountBarsProps) -> Html {
    if props.items.is_empty() {
        return no_data();
    }
    let max = props.items.iter().map(|i| i.count).max().unwrap_or(0) as f64;

    html! {
        <ul class="space-y-3">
            {for props.items.iter().map(|item| html! {
                <li>
                    <div class="flex justify-between text-sm mb-1">
                        <span class="text-neutral-700">{&item.label}</span>
                        <span class="font-medium text-neutral-900">{item.count}</span>
                    </div>
                    <div class="h-2 bg-neutral-100 rounded">
                        <div
                            class="h-2 bg-neutral-800 rounded"
                            style={format!("width: {:.0}%", share(item.count as f64, max))}
                        ></div>
                    </div>
                </li>
            })}
        </ul>
    }
}

#[function_component]
fn TopSpaces(props: &StatsProps) -> Html {
    let spaces = &props.stats.top_spaces;
    if spaces.is_empty() {
        return no_data();
    }

    html! {
        <table class="min-w-full text-sm">
            <thead>
                <tr class="text-left text-neutral-500">
                    <th class="pb-2 font-medium">{"Space"}</th>
                    <th class="pb-2 font-medium text-right">{"Bookings"}</th>
                    <th class="pb-2 font-medium text-right">{"Revenue"}</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-neutral-100">
                {for spaces.iter().map(|space| html! {
                    <tr>
                        <td class="py-2">
                            <p class="font-medium text-neutral-900">{&space.name}</p>
                            <p class="text-xs text-neutral-500">{&space.city}</p>
                        </td>
                        <td class="py-2 text-right">{space.bookings}</td>
                        <td class="py-2 text-right">{rupees(space.revenue)}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}
