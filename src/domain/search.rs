use crate::prelude::Contact;

/// Exact match on `id`, or substring match on name, phone or comment.
/// Case-sensitive.
pub fn contact_matches(contact: &Contact, query: &str) -> bool {
    contact.id == query
        || contact.name.contains(query)
        || contact.phone.contains(query)
        || contact.comment.contains(query)
}

/// Contacts matching `query`, in store order.
pub fn search_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    contacts
        .iter()
        .filter(|contact| contact_matches(contact, query))
        .collect()
}
