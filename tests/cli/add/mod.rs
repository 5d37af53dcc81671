mod add_installs_missing_components_contract;
