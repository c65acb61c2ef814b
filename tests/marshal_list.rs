// Copyright The gtester-tools developers.
// SPDX-License-Identifier: Apache-2.0
pub(crate) mod utils;

#[cfg(test)]
mod marshal_list_tests {
    use gtester_tools::utils::reader::Reader;
    use gtester_tools::utils::writer::{WriteBuffer::Vec as WBVec, Writer};
    use pretty_assertions::assert_eq;

    use crate::assert_output_from_file_eq;
    use crate::utils::{
        get_full_path_for_resource_file, Command, CommandTestRunner, StatusCode,
    };

    #[derive(Default)]
    struct MarshalListTestRunner<'args> {
        sources: Vec<&'args str>,
        output: Option<&'args str>,
    }

    impl<'args> MarshalListTestRunner<'args> {
        fn sources(&'args mut self, args: Vec<&'args str>) -> &'args mut MarshalListTestRunner {
            self.sources = args;
            self
        }

        #[allow(dead_code)]
        fn output(&'args mut self, arg: Option<&'args str>) -> &'args mut MarshalListTestRunner {
            self.output = arg;
            self
        }
    }

    impl<'args> CommandTestRunner for MarshalListTestRunner<'args> {
        fn build_args(&self) -> Vec<String> {
            let mut args = vec![Command::MarshalList.to_string()];

            for source in &self.sources {
                args.push(get_full_path_for_resource_file(source));
            }

            if self.output.is_some() {
                args.push(String::from("-o"));
                args.push(get_full_path_for_resource_file(self.output.unwrap()))
            }

            args
        }
    }

    #[rstest::rstest]
    #[case(
        vec!["resources/marshal/data-dir"],
        "resources/marshal/output-dir/full_scan.out"
    )]
    #[case(
        vec!["resources/marshal/data-dir/porter.c"],
        "resources/marshal/output-dir/porter_only.out"
    )]
    #[case(
        vec![
            "resources/marshal/data-dir/session.c",
            "resources/marshal/data-dir/session.h",
        ],
        "resources/marshal/output-dir/session_only.out"
    )]
    fn test_marshal_list(
        #[case] source_args: Vec<&str>,
        #[case] expected_output_file_path: &str,
    ) {
        let mut reader = Reader::default();
        let mut writer = Writer::new(WBVec(vec![]), WBVec(vec![]));
        let status_code = MarshalListTestRunner::default()
            .sources(source_args)
            .run(&mut writer, &mut reader);

        assert_eq!(StatusCode::SUCCESS, status_code);
        assert_output_from_file_eq!(expected_output_file_path, writer)
    }

    #[test]
    fn test_marshal_list_missing_source_is_fatal() {
        let mut reader = Reader::default();
        let mut writer = Writer::new(WBVec(vec![]), WBVec(vec![]));
        let status_code = MarshalListTestRunner::default()
            .sources(vec!["resources/marshal/no-such-dir"])
            .run(&mut writer, &mut reader);

        assert_eq!(StatusCode::INTERNAL_FAILURE, status_code);
    }
}
