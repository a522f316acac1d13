//! Condition table: search, sortable columns and status badges.

use leptos::prelude::*;

use fundus_ai_common::{filter_and_sort, ConditionResult, DetectionStatus, SortKey, SortOrder};

#[component]
pub fn ConditionTable(conditions: Vec<ConditionResult>) -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let (sort_key, set_sort_key) = signal(SortKey::Probability);
    let (sort_order, set_sort_order) = signal(SortOrder::Desc);

    // Canonical order stays untouched; sorting works on copies.
    let all = StoredValue::new(conditions);
    let total = all.with_value(|c| c.len());

    let rows = move || {
        all.with_value(|c| filter_and_sort(c, &search.get(), sort_key.get(), sort_order.get()))
    };

    let on_sort = move |key: SortKey| {
        if sort_key.get_untracked() == key {
            set_sort_order.update(|order| *order = order.toggled());
        } else {
            set_sort_key.set(key);
            set_sort_order.set(SortOrder::Asc);
        }
    };

    let sort_arrow = move |key: SortKey| {
        move || {
            if sort_key.get() == key {
                sort_order.get().arrow()
            } else {
                ""
            }
        }
    };

    view! {
        <div class="condition-table">
            <div class="table-toolbar">
                <h3>"Detected Conditions"</h3>
                <input
                    type="text"
                    class="table-search"
                    placeholder="Search..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <table>
                <thead>
                    <tr>
                        <th on:click=move |_| on_sort(SortKey::Name)>
                            "Condition " {sort_arrow(SortKey::Name)}
                        </th>
                        <th on:click=move |_| on_sort(SortKey::Probability)>
                            "Confidence " {sort_arrow(SortKey::Probability)}
                        </th>
                        <th>"Visual"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|condition| condition.name.clone()
                        children=move |condition: ConditionResult| {
                            let status = DetectionStatus::from_probability(condition.probability);
                            let percentage = condition.probability * 100.0;
                            view! {
                                <tr>
                                    <td>{condition.name.clone()}</td>
                                    <td>{format!("{:.0}%", percentage)}</td>
                                    <td>
                                        <div class="probability-track">
                                            <div
                                                class="probability-fill"
                                                class:detected=condition.detected
                                                style=format!("width: {}%;", percentage)
                                            />
                                        </div>
                                    </td>
                                    <td>
                                        <span class=format!("status-badge {}", status.css_class())>
                                            {status.label()}
                                        </span>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <p class="text-muted">
                {move || format!("Showing {} of {} conditions", rows().len(), total)}
            </p>
        </div>
    }
}
