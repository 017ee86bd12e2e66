/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Paginated, searchable table of an event's attendees.

use crate::attendees_api::list_attendees;
use crate::components::icon_button::IconButton;
use crate::components::icons::chevrons::{
    ChevronLeftIcon, ChevronRightIcon, ChevronsLeftIcon, ChevronsRightIcon,
};
use crate::components::icons::ellipsis::EllipsisIcon;
use crate::components::icons::search::SearchIcon;
use crate::components::table::{Table, TableCell, TableHeader, TableRow};
use crate::relative_time::from_now;
use dioxus::prelude::*;
use passin_types::{Attendee, Pagination};

#[derive(Clone, PartialEq)]
enum FetchState {
    Loading,
    Loaded,
    Failed(String),
}

/// Attendee table for one event.
///
/// Any change to the page or the search text re-fetches. Rows from the
/// previous response stay on screen until the next one arrives. Responses
/// that arrive after a newer request was issued are discarded.
///
/// Mount with `key: "{event_id}"` so switching events starts from a fresh
/// state.
#[component]
pub fn AttendeeList(event_id: String) -> Element {
    let mut pagination = use_signal(Pagination::default);
    let mut search = use_signal(String::new);
    let mut attendees = use_signal(Vec::<Attendee>::new);
    let mut fetch_state = use_signal(|| FetchState::Loading);
    let mut generation = use_signal(|| 0u64);
    let mut retry = use_signal(|| 0u32);

    // Only page moves refetch; a new total from a response does not.
    let page_index = use_memo(move || pagination.read().page_index());

    use_effect(move || {
        // Dependencies: page index, search and the retry counter.
        let page_index = page_index();
        let query = search();
        let _ = retry();

        let event_id = event_id.clone();
        let request = generation.with_mut(|g| {
            *g += 1;
            *g
        });
        fetch_state.set(FetchState::Loading);

        spawn(async move {
            let result = list_attendees(&event_id, page_index, &query).await;
            if *generation.peek() != request {
                log::debug!("Discarding stale attendees response #{request}");
                return;
            }
            match result {
                Ok(response) => {
                    pagination.with_mut(|p| *p = p.with_total(response.total));
                    attendees.set(response.attendees);
                    fetch_state.set(FetchState::Loaded);
                }
                Err(e) => {
                    log::error!("Failed to fetch attendees: {e}");
                    fetch_state.set(FetchState::Failed(e.to_string()));
                }
            }
        });
    });

    let on_search_input_change = move |evt: Event<FormData>| {
        search.set(evt.value());
        pagination.with_mut(|p| *p = p.first());
    };
    let go_to_first_page = move |_: MouseEvent| pagination.with_mut(|p| *p = p.first());
    let go_to_previous_page = move |_: MouseEvent| pagination.with_mut(|p| *p = p.previous());
    let go_to_next_page = move |_: MouseEvent| pagination.with_mut(|p| *p = p.next());
    let go_to_last_page = move |_: MouseEvent| pagination.with_mut(|p| *p = p.last());

    let current = pagination();

    let rows = attendees.read().clone();
    let shown = rows.len();

    rsx! {
        div { class: "attendee-list",
            div { class: "attendee-list-toolbar",
                h1 { class: "attendee-list-title", "Participantes" }
                div { class: "search-box",
                    SearchIcon {}
                    input {
                        class: "search-input",
                        r#type: "text",
                        placeholder: "Buscar participante...",
                        value: "{search}",
                        oninput: on_search_input_change,
                    }
                }
                if *fetch_state.read() == FetchState::Loading {
                    span { class: "loading-spinner", title: "Carregando" }
                }
            }

            if let FetchState::Failed(error) = &*fetch_state.read() {
                div { class: "attendee-list-error",
                    span { "Erro ao carregar participantes: {error}" }
                    button {
                        class: "retry-btn",
                        r#type: "button",
                        onclick: move |_| retry += 1,
                        "Tentar novamente"
                    }
                }
            }

            Table {
                thead {
                    TableRow { class: "table-head-row",
                        TableHeader { width: 48,
                            input { r#type: "checkbox", class: "select-all" }
                        }
                        TableHeader { "Código" }
                        TableHeader { "Participante" }
                        TableHeader { "Data da inscrição" }
                        TableHeader { "Data do check-in" }
                        TableHeader { width: 64, "" }
                    }
                }
                tbody {
                    for attendee in rows.iter() {
                        AttendeeRow { key: "{attendee.id}", attendee: attendee.clone() }
                    }
                }
                tfoot {
                    tr {
                        TableCell { colspan: 3, class: "showing-count",
                            "Mostrando {shown} de {current.total()} itens"
                        }
                        TableCell { colspan: 3, class: "pagination-cell",
                            div { class: "pagination",
                                span { class: "page-count",
                                    "{current.page()} de {current.last_page()} páginas"
                                }
                                div { class: "pagination-buttons",
                                    IconButton {
                                        class: "first-page",
                                        title: "Primeira página",
                                        disabled: !current.can_go_previous(),
                                        onclick: go_to_first_page,
                                        ChevronsLeftIcon {}
                                    }
                                    IconButton {
                                        class: "previous-page",
                                        title: "Página anterior",
                                        disabled: !current.can_go_previous(),
                                        onclick: go_to_previous_page,
                                        ChevronLeftIcon {}
                                    }
                                    IconButton {
                                        class: "next-page",
                                        title: "Próxima página",
                                        disabled: !current.can_go_next(),
                                        onclick: go_to_next_page,
                                        ChevronRightIcon {}
                                    }
                                    IconButton {
                                        class: "last-page",
                                        title: "Última página",
                                        disabled: !current.can_go_next(),
                                        onclick: go_to_last_page,
                                        ChevronsRightIcon {}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AttendeeRow(attendee: Attendee) -> Element {
    let subscribed = from_now(attendee.subscribed_at);
    let checked_in = attendee.checked_in_at.map(from_now).unwrap_or_default();

    rsx! {
        TableRow { class: "attendee-row",
            TableCell {
                input { r#type: "checkbox" }
            }
            TableCell { class: "attendee-id", "{attendee.id}" }
            TableCell {
                div { class: "attendee-identity",
                    span { class: "attendee-name", "{attendee.name}" }
                    span { class: "attendee-email", "{attendee.email}" }
                }
            }
            TableCell { class: "subscribed-at", "{subscribed}" }
            TableCell { class: "checked-in-at",
                if attendee.has_checked_in() {
                    "{checked_in}"
                } else {
                    span { class: "not-checked-in", "Não fez check-in" }
                }
            }
            TableCell {
                IconButton { transparent: true, title: "Mais ações", EllipsisIcon {} }
            }
        }
    }
}
