use derive_new::new;

#[derive(new)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
}
