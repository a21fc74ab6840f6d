// Hand-maintained; keep in sync with `db::CREATE_USERS_TABLE`.

diesel::table! {
    users (id) {
        id -> BigInt,
        name -> Text,
        email -> Text,
        created_at -> Text,
    }
}
