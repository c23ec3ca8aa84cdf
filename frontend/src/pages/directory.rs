use yew::prelude::*;

use crate::{
    components::directory_grid::DirectoryGrid,
    directory::{COURSES, LABS},
};

#[function_component(CoursesPage)]
pub fn courses_page() -> Html {
    html! {
        <main class="container py-10 space-y-6">
            <header class="space-y-2">
                <h1 class="text-3xl font-bold">{"Courses"}</h1>
                <p class="text-[var(--muted)]">{"Structured learning paths from first shell session to production clusters."}</p>
            </header>
            <DirectoryGrid entries={COURSES} noun="courses" />
        </main>
    }
}

#[function_component(LabsPage)]
pub fn labs_page() -> Html {
    html! {
        <main class="container py-10 space-y-6">
            <header class="space-y-2">
                <h1 class="text-3xl font-bold">{"Labs"}</h1>
                <p class="text-[var(--muted)]">{"Short, hands-on exercises against real tooling."}</p>
            </header>
            <DirectoryGrid entries={LABS} noun="labs" />
        </main>
    }
}
