mod remove_blocked_by_dependents_contract;
mod remove_deletes_files_and_imports_contract;
mod remove_offers_unneeded_packages_contract;
mod remove_rejects_invalid_requests_contract;
