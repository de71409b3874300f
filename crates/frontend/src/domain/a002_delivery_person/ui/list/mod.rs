use contracts::domain::a002_delivery_person::DeliveryPerson;
use leptos::prelude::*;

use crate::shared::entity_crud::entity_crud_table;

#[component]
#[allow(non_snake_case)]
pub fn DeliveryPersonList() -> impl IntoView {
    entity_crud_table::<DeliveryPerson>()
}
