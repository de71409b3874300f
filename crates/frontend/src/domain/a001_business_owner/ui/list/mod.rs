use contracts::domain::a001_business_owner::BusinessOwner;
use leptos::prelude::*;

use crate::shared::entity_crud::entity_crud_table;

#[component]
#[allow(non_snake_case)]
pub fn BusinessOwnerList() -> impl IntoView {
    entity_crud_table::<BusinessOwner>()
}
