//! Person handlers.

use std::collections::HashMap;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::{AppError, AppResult};
use domain::{
    FieldReader, Location, Person, PersonOut, PersonWithLocation, ReadFields, MAX_NAME_LENGTH,
    MIN_NAME_LENGTH, MIN_PERSON_ID, PERSON_EXISTS_MESSAGE,
};

use crate::extractors::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::state::AppState;

/// Key used when `name` is omitted from the detail query
const MISSING_NAME_KEY: &str = "null";

/// Query parameters for the person detail lookup
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PersonDetailQuery {
    /// Person name, between 1 and 50 characters
    #[validate(length(
        min = MIN_NAME_LENGTH,
        max = MAX_NAME_LENGTH,
        message = "name must be between 1 and 50 characters"
    ))]
    #[param(example = "Luis", min_length = 1, max_length = 50)]
    pub name: Option<String>,
    /// Person age
    #[param(example = "25")]
    pub age: String,
}

impl ReadFields for PersonDetailQuery {
    fn read_fields(reader: &mut FieldReader<'_>) -> Self {
        Self {
            name: reader.optional("name"),
            age: reader.required("age"),
        }
    }
}

/// Path parameters addressing a single person
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PersonIdPath {
    /// Person identifier, greater than 0
    #[validate(range(min = MIN_PERSON_ID, message = "person_id must be greater than 0"))]
    #[param(example = 123, minimum = 1)]
    pub person_id: i64,
}

impl ReadFields for PersonIdPath {
    fn read_fields(reader: &mut FieldReader<'_>) -> Self {
        Self {
            person_id: reader.required("person_id"),
        }
    }
}

/// Body of a person update: the person and where they live
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePersonRequest {
    #[validate(nested)]
    pub person: Person,
    #[validate(nested)]
    pub location: Location,
}

impl ReadFields for UpdatePersonRequest {
    fn read_fields(reader: &mut FieldReader<'_>) -> Self {
        Self {
            person: reader.nested("person"),
            location: reader.nested("location"),
        }
    }
}

/// Create person routes
pub fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/new", post(create_person))
        .route("/detail", get(show_person))
        .route("/detail/:person_id", get(show_person_by_id))
        .route("/:person_id", put(update_person))
}

/// Create a person
#[utoipa::path(
    post,
    path = "/person/new",
    tag = "Persons",
    request_body = Person,
    responses(
        (status = 201, description = "Person created", body = PersonOut),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_person(
    ValidatedJson(person): ValidatedJson<Person>,
) -> AppResult<(StatusCode, Json<PersonOut>)> {
    tracing::debug!(first_name = %person.base.first_name, "Person accepted");
    Ok((StatusCode::CREATED, Json(PersonOut::from(person))))
}

/// Echo a person's name and age
#[utoipa::path(
    get,
    path = "/person/detail",
    tag = "Persons",
    params(PersonDetailQuery),
    responses(
        (status = 200, description = "Name mapped to age", body = HashMap<String, String>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn show_person(
    ValidatedQuery(query): ValidatedQuery<PersonDetailQuery>,
) -> AppResult<Json<HashMap<String, String>>> {
    let key = query.name.unwrap_or_else(|| MISSING_NAME_KEY.to_string());
    Ok(Json(HashMap::from([(key, query.age)])))
}

/// Check whether a person exists
#[utoipa::path(
    get,
    path = "/person/detail/{person_id}",
    tag = "Persons",
    params(PersonIdPath),
    responses(
        (status = 200, description = "Person exists", body = HashMap<String, String>),
        (status = 404, description = "Person not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn show_person_by_id(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<PersonIdPath>,
) -> AppResult<Json<HashMap<String, String>>> {
    state.persons.ensure_exists(path.person_id)?;

    Ok(Json(HashMap::from([(
        path.person_id.to_string(),
        PERSON_EXISTS_MESSAGE.to_string(),
    )])))
}

/// Update a person and their location
///
/// The response merges every person field (password included) with the location.
/// Path and body failures are reported together.
#[utoipa::path(
    put,
    path = "/person/{person_id}",
    tag = "Persons",
    params(PersonIdPath),
    request_body = UpdatePersonRequest,
    responses(
        (status = 200, description = "Merged person and location", body = PersonWithLocation),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_person(
    path: Result<ValidatedPath<PersonIdPath>, AppError>,
    payload: Result<ValidatedJson<UpdatePersonRequest>, AppError>,
) -> AppResult<Json<PersonWithLocation>> {
    let (ValidatedPath(path), ValidatedJson(payload)) = match (path, payload) {
        (Ok(path), Ok(payload)) => (path, payload),
        (Err(err), Ok(_)) | (Ok(_), Err(err)) => return Err(err),
        (Err(path_err), Err(body_err)) => return Err(path_err.combine(body_err)),
    };

    tracing::debug!(person_id = path.person_id, "Person update accepted");
    Ok(Json(PersonWithLocation::merge(
        payload.person,
        payload.location,
    )))
}
