use super::*;

use axum::extract::DefaultBodyLimit;

const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

fn collection_routes<C: Collection + 'static>(
    router: Router<Arc<AppState>>,
    path: &str,
) -> Router<Arc<AppState>> {
    router
        .route(path, get(list_records::<C>).post(create_record::<C>))
        .route(
            &format!("{}/:id", path),
            get(get_record::<C>)
                .put(update_record::<C>)
                .delete(delete_record::<C>),
        )
}

pub(super) fn build_router(state: Arc<AppState>) -> Router {
    let mut api = Router::new();
    api = collection_routes::<Companies>(api, "/companies");
    api = collection_routes::<Jobs>(api, "/jobs");
    api = collection_routes::<Internships>(api, "/internships");
    api = collection_routes::<Courses>(api, "/courses");
    api = collection_routes::<Mentors>(api, "/mentors");

    let api = api
        .route("/courses/:id/curriculum", get(curriculum))
        .route("/courses/:id/sections", post(add_section))
        .route("/courses/:id/sections/:section_id/lessons", post(add_lesson))
        .route("/applications/apply", post(apply))
        .route("/applications/my-applications", get(my_applications))
        .route("/applications/company/:id", get(company_applications))
        .route("/applications/:id", get(get_application))
        .route("/applications/:id/status", put(update_status))
        .route("/admin/applications", get(all_applications))
        .route("/mentorships", get(programs))
        .route("/mentorships/create", post(create_program))
        .route("/mentorships/book", post(book))
        .route("/mentorships/user/my-bookings", get(my_bookings))
        .route("/mentorships/booking/:id", get(get_booking))
        .route("/mentorships/:id", get(get_program))
        .route("/mentorships/:id/slots", post(add_slots))
        .route("/enrollments", get(enrollments))
        .route("/enrollments/admin/all", get(all_enrollments))
        .route("/enrollments/:id", get(get_enrollment))
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user).delete(delete_user))
        .route("/dashboard/metrics", get(metrics))
        .layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .route("/healthz", get(healthz))
        .merge(api)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
