fn main() {
    dioxus::launch(folio_web::App);
}
