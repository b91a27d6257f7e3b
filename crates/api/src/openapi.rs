//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{
    ContactForm, HairColor, Location, LoginForm, LoginOut, Person, PersonBase, PersonOut,
    PersonWithLocation,
};

use crate::handlers::home_handler::HomeResponse;
use crate::handlers::person_handler::UpdatePersonRequest;
use crate::handlers::upload_handler::{ImageInfo, ImageUploadForm};
use crate::handlers::{auth_handler, contact_handler, home_handler, person_handler, upload_handler};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Person API",
        version = "0.1.0",
        description = "Person records with validated path, query, body, form, header, cookie and file input",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        home_handler::home,
        person_handler::create_person,
        person_handler::show_person,
        person_handler::show_person_by_id,
        person_handler::update_person,
        auth_handler::login,
        contact_handler::contact,
        upload_handler::post_image,
    ),
    components(
        schemas(
            HomeResponse,
            HairColor,
            PersonBase,
            Person,
            PersonOut,
            Location,
            PersonWithLocation,
            UpdatePersonRequest,
            LoginForm,
            LoginOut,
            ContactForm,
            ImageUploadForm,
            ImageInfo,
        )
    ),
    tags(
        (name = "Home", description = "Greeting"),
        (name = "Persons", description = "Person creation, lookup and update"),
        (name = "Auth", description = "Form-based login"),
        (name = "Contact", description = "Contact form with header and cookie input"),
        (name = "Uploads", description = "Multipart file upload"),
    )
)]
pub struct ApiDoc;
