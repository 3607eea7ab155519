mod generators {
    mod bss_factory_team_test;
    mod challenge_cup_test;
    mod factory_team_test;
    mod hackmons_test;
    mod preset_team_test;
    mod random_team_test;
}
