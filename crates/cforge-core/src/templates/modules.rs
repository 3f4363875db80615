//! CMake helper modules emitted into `cmake/`.
//!
//! The warning/sanitizer/coverage/analysis modules come in two flavors:
//! the compiler-id variable and the target properties they set differ
//! between C and C++ projects (`CMAKE_C_COMPILER_ID` vs
//! `CMAKE_CXX_COMPILER_ID`, `C_CLANG_TIDY` vs `CXX_CLANG_TIDY`).

use crate::domain::Language;

/// `cmake/CompilerWarnings.cmake` — defines `set_project_warnings(target)`.
pub fn compiler_warnings(language: Language) -> String {
    let id_var = compiler_id_var(language);

    let mut s = String::new();
    s.push_str("# Set compiler warnings for a target\n");
    s.push_str("function(set_project_warnings target)\n");

    s.push_str(match language {
        Language::Cxx => {
            r#"    set(MSVC_WARNINGS
        /W4          # Baseline reasonable warnings
        /w14242      # 'identifier': conversion from 'type1' to 'type2', possible loss of data
        /w14254      # 'operator': conversion from 'type1:field_bits' to 'type2:field_bits'
        /w14263      # 'function': member function does not override any base class virtual member function
        /w14265      # 'classname': class has virtual functions, but destructor is not virtual
        /w14287      # 'operator': unsigned/negative constant mismatch
        /we4289      # nonstandard extension used: 'variable': loop control variable declared in the for-loop is used outside the for-loop scope
        /w14296      # 'operator': expression is always 'boolean_value'
        /w14311      # 'variable': pointer truncation from 'type1' to 'type2'
        /w14545      # expression before comma evaluates to a function which is missing an argument list
        /w14546      # function call before comma missing argument list
        /w14547      # 'operator': operator before comma has no effect; expected operator with side-effect
        /w14549      # 'operator': operator before comma has no effect; did you intend 'operator'?
        /w14555      # expression has no effect; expected expression with side-effect
        /w14619      # pragma warning: there is no warning number 'number'
        /w14640      # Enable warning on thread un-safe static member initialization
        /w14826      # Conversion from 'type1' to 'type2' is sign-extended
        /w14905      # wide string literal cast to 'LPSTR'
        /w14906      # string literal cast to 'LPWSTR'
        /w14928      # illegal copy-initialization; more than one user-defined conversion has been implicitly applied
        /permissive- # standards conformance mode
    )

    set(CLANG_WARNINGS
        -Wall
        -Wextra              # reasonable and standard
        -Wshadow             # warn if a variable declaration shadows one from a parent context
        -Wnon-virtual-dtor   # warn if a class with virtual functions has a non-virtual destructor
        -Wold-style-cast     # warn for c-style casts
        -Wcast-align         # warn for potential performance problem casts
        -Wunused             # warn on anything being unused
        -Woverloaded-virtual # warn if you overload (not override) a virtual function
        -Wpedantic           # warn if non-standard C++ is used
        -Wconversion         # warn on type conversions that may lose data
        -Wsign-conversion    # warn on sign conversions
        -Wnull-dereference   # warn if a null dereference is detected
        -Wdouble-promotion   # warn if float is implicit promoted to double
        -Wformat=2           # warn on security issues around functions that format output
        -Wimplicit-fallthrough # warn on missing break in switch
    )
"#
        }
        Language::C => {
            r#"    set(MSVC_WARNINGS
        /W4          # Baseline reasonable warnings
        /w14242      # 'identifier': conversion from 'type1' to 'type2', possible loss of data
        /w14254      # 'operator': conversion from 'type1:field_bits' to 'type2:field_bits'
        /w14287      # 'operator': unsigned/negative constant mismatch
        /we4289      # nonstandard extension used: 'variable': loop control variable declared in the for-loop is used outside the for-loop scope
        /w14296      # 'operator': expression is always 'boolean_value'
        /w14311      # 'variable': pointer truncation from 'type1' to 'type2'
        /w14545      # expression before comma evaluates to a function which is missing an argument list
        /w14546      # function call before comma missing argument list
        /w14547      # 'operator': operator before comma has no effect; expected operator with side-effect
        /w14549      # 'operator': operator before comma has no effect; did you intend 'operator'?
        /w14555      # expression has no effect; expected expression with side-effect
        /w14619      # pragma warning: there is no warning number 'number'
        /w14826      # Conversion from 'type1' to 'type2' is sign-extended
        /permissive- # standards conformance mode
    )

    set(CLANG_WARNINGS
        -Wall
        -Wextra              # reasonable and standard
        -Wshadow             # warn if a variable declaration shadows one from a parent context
        -Wcast-align         # warn for potential performance problem casts
        -Wunused             # warn on anything being unused
        -Wpedantic           # warn if non-standard C is used
        -Wconversion         # warn on type conversions that may lose data
        -Wsign-conversion    # warn on sign conversions
        -Wnull-dereference   # warn if a null dereference is detected
        -Wdouble-promotion   # warn if float is implicit promoted to double
        -Wformat=2           # warn on security issues around functions that format output
        -Wimplicit-fallthrough # warn on missing break in switch
    )
"#
        }
    });

    s.push_str(
        r#"
    set(GCC_WARNINGS
        ${CLANG_WARNINGS}
        -Wmisleading-indentation # warn if indentation implies blocks where blocks do not exist
        -Wduplicated-cond        # warn if if / else chain has duplicated conditions
        -Wduplicated-branches    # warn if if / else branches have duplicated code
        -Wlogical-op             # warn about logical operations being used where bitwise were probably wanted
"#,
    );
    if language == Language::Cxx {
        s.push_str(
            "        -Wuseless-cast           # warn if you perform a cast to the same type\n",
        );
    }
    s.push_str("    )\n\n");

    s.push_str(&format!(
        r#"    if(MSVC)
        set(PROJECT_WARNINGS ${{MSVC_WARNINGS}})
    elseif({id_var} MATCHES ".*Clang")
        set(PROJECT_WARNINGS ${{CLANG_WARNINGS}})
    elseif({id_var} STREQUAL "GNU")
        set(PROJECT_WARNINGS ${{GCC_WARNINGS}})
    else()
        message(AUTHOR_WARNING "No compiler warnings set for '${{{id_var}}}' compiler.")
    endif()
"#
    ));

    s.push_str(
        r#"
    # Check if target is INTERFACE (header-only library)
    get_target_property(target_type ${target} TYPE)
    if(target_type STREQUAL "INTERFACE_LIBRARY")
        target_compile_options(${target} INTERFACE ${PROJECT_WARNINGS})
    else()
        target_compile_options(${target} PRIVATE ${PROJECT_WARNINGS})
    endif()
endfunction()
"#,
    );

    s
}

/// `cmake/Sanitizers.cmake` — defines `enable_sanitizers(target)`.
pub fn sanitizers(language: Language) -> String {
    let id_var = compiler_id_var(language);

    let mut s = String::new();
    s.push_str("# Sanitizer configuration module\n");
    s.push_str("# Provides Address, Memory, Thread, and Undefined Behavior sanitizers\n\n");
    s.push_str("function(enable_sanitizers target)\n");
    s.push_str(&format!(
        "    if({id_var} STREQUAL \"GNU\" OR {id_var} MATCHES \".*Clang\")\n"
    ));
    s.push_str(
        r#"        set(SANITIZERS "")

        option(ENABLE_SANITIZER_ADDRESS "Enable address sanitizer" OFF)
        if(ENABLE_SANITIZER_ADDRESS)
            list(APPEND SANITIZERS "address")
        endif()

        option(ENABLE_SANITIZER_LEAK "Enable leak sanitizer" OFF)
        if(ENABLE_SANITIZER_LEAK)
            list(APPEND SANITIZERS "leak")
        endif()

        option(ENABLE_SANITIZER_UNDEFINED "Enable undefined behavior sanitizer" OFF)
        if(ENABLE_SANITIZER_UNDEFINED)
            list(APPEND SANITIZERS "undefined")
        endif()

        option(ENABLE_SANITIZER_THREAD "Enable thread sanitizer" OFF)
        if(ENABLE_SANITIZER_THREAD)
            if("address" IN_LIST SANITIZERS OR "leak" IN_LIST SANITIZERS)
                message(WARNING "Thread sanitizer cannot be used with Address or Leak sanitizer")
            else()
                list(APPEND SANITIZERS "thread")
            endif()
        endif()

"#,
    );
    s.push_str(&format!(
        "        option(ENABLE_SANITIZER_MEMORY \"Enable memory sanitizer (Clang only)\" OFF)\n        if(ENABLE_SANITIZER_MEMORY AND {id_var} MATCHES \".*Clang\")\n"
    ));
    s.push_str(
        r#"            if("address" IN_LIST SANITIZERS
               OR "thread" IN_LIST SANITIZERS
               OR "leak" IN_LIST SANITIZERS)
                message(WARNING "Memory sanitizer cannot be used with Address, Thread, or Leak sanitizer")
            else()
                list(APPEND SANITIZERS "memory")
            endif()
        endif()

        if(SANITIZERS)
            list(JOIN SANITIZERS "," LIST_OF_SANITIZERS)
            message(STATUS "Enabling sanitizers: ${LIST_OF_SANITIZERS}")

            # Get target type to determine INTERFACE vs PRIVATE
            get_target_property(target_type ${target} TYPE)
            if(target_type STREQUAL "INTERFACE_LIBRARY")
                target_compile_options(${target} INTERFACE
                    -fsanitize=${LIST_OF_SANITIZERS}
                    -fno-omit-frame-pointer
                    -fno-optimize-sibling-calls
                )
                target_link_options(${target} INTERFACE -fsanitize=${LIST_OF_SANITIZERS})
            else()
                target_compile_options(${target} PRIVATE
                    -fsanitize=${LIST_OF_SANITIZERS}
                    -fno-omit-frame-pointer
                    -fno-optimize-sibling-calls
                )
                target_link_options(${target} PRIVATE -fsanitize=${LIST_OF_SANITIZERS})
            endif()
        endif()
    elseif(MSVC)
        option(ENABLE_SANITIZER_ADDRESS "Enable address sanitizer" OFF)
        if(ENABLE_SANITIZER_ADDRESS)
            message(STATUS "Enabling AddressSanitizer for MSVC")
            target_compile_options(${target} PRIVATE /fsanitize=address)
        endif()
    endif()
endfunction()
"#,
    );

    s
}

/// `cmake/Coverage.cmake` — defines `enable_coverage(target)` and
/// `add_coverage_target()`.
pub fn coverage(language: Language) -> String {
    let id_var = compiler_id_var(language);

    let mut s = String::new();
    s.push_str("# Code coverage configuration module\n");
    s.push_str("# Supports GCC (gcov) and Clang (llvm-cov)\n\n");
    s.push_str("option(ENABLE_COVERAGE \"Enable code coverage\" OFF)\n\n");
    s.push_str("function(enable_coverage target)\n");
    s.push_str("    if(NOT ENABLE_COVERAGE)\n        return()\n    endif()\n\n");
    s.push_str(&format!("    if({id_var} STREQUAL \"GNU\")\n"));
    s.push_str(
        r#"        message(STATUS "Enabling code coverage for GCC")
        target_compile_options(${target} PRIVATE --coverage -fprofile-arcs -ftest-coverage)
        target_link_options(${target} PRIVATE --coverage)
"#,
    );
    s.push_str(&format!("    elseif({id_var} MATCHES \".*Clang\")\n"));
    s.push_str(
        r#"        message(STATUS "Enabling code coverage for Clang")
        target_compile_options(${target} PRIVATE -fprofile-instr-generate -fcoverage-mapping)
        target_link_options(${target} PRIVATE -fprofile-instr-generate -fcoverage-mapping)
    else()
"#,
    );
    s.push_str(&format!(
        "        message(WARNING \"Code coverage is not supported for ${{{id_var}}}\")\n"
    ));
    s.push_str("    endif()\nendfunction()\n\n");

    s.push_str("# Custom target to generate coverage report\n");
    s.push_str("function(add_coverage_target)\n");
    s.push_str("    if(NOT ENABLE_COVERAGE)\n        return()\n    endif()\n\n");
    s.push_str(
        r#"    find_program(LCOV lcov)
    find_program(GENHTML genhtml)
    find_program(LLVM_COV llvm-cov)
    find_program(LLVM_PROFDATA llvm-profdata)

"#,
    );
    s.push_str(&format!(
        "    if({id_var} STREQUAL \"GNU\" AND LCOV AND GENHTML)\n"
    ));
    s.push_str(
        r#"        add_custom_target(coverage
            COMMAND ${LCOV} --directory . --capture --output-file coverage.info
            COMMAND ${LCOV} --remove coverage.info '/usr/*' '*/tests/*' '*/build/*' --output-file coverage.info
            COMMAND ${GENHTML} coverage.info --output-directory coverage_report
            WORKING_DIRECTORY ${CMAKE_BINARY_DIR}
            COMMENT "Generating code coverage report..."
        )
        message(STATUS "Coverage target available: cmake --build build --target coverage")
"#,
    );
    s.push_str(&format!(
        "    elseif({id_var} MATCHES \".*Clang\" AND LLVM_COV AND LLVM_PROFDATA)\n"
    ));
    s.push_str(
        r#"        add_custom_target(coverage
            COMMAND ${LLVM_PROFDATA} merge -sparse default.profraw -o default.profdata
            COMMAND ${LLVM_COV} show ./tests -instr-profile=default.profdata -format=html -output-dir=coverage_report
            WORKING_DIRECTORY ${CMAKE_BINARY_DIR}
            COMMENT "Generating code coverage report..."
        )
        message(STATUS "Coverage target available: cmake --build build --target coverage")
    else()
        message(WARNING "Coverage tools not found. Install lcov/genhtml (GCC) or llvm-cov/llvm-profdata (Clang)")
    endif()
endfunction()
"#,
    );

    s
}

/// `cmake/StaticAnalysis.cmake` — defines `enable_static_analysis(target)`.
pub fn static_analysis(language: Language) -> String {
    let prop = language.cmake_token(); // C_CLANG_TIDY vs CXX_CLANG_TIDY

    let mut s = String::new();
    s.push_str("# Static analysis configuration module\n");
    s.push_str("# Integrates clang-tidy, cppcheck, and include-what-you-use\n\n");
    s.push_str(
        r#"option(ENABLE_CLANG_TIDY "Enable clang-tidy static analysis" OFF)
option(ENABLE_CPPCHECK "Enable cppcheck static analysis" OFF)
option(ENABLE_IWYU "Enable include-what-you-use" OFF)

function(enable_static_analysis target)
    # Clang-Tidy
    if(ENABLE_CLANG_TIDY)
        find_program(CLANG_TIDY clang-tidy)
        if(CLANG_TIDY)
            message(STATUS "Enabling clang-tidy for ${target}")
"#,
    );
    s.push_str(&format!(
        "            set_target_properties(${{target}} PROPERTIES\n                {prop}_CLANG_TIDY \"${{CLANG_TIDY}};--config-file=${{CMAKE_SOURCE_DIR}}/.clang-tidy\"\n            )\n"
    ));
    s.push_str(
        r#"        else()
            message(WARNING "clang-tidy not found")
        endif()
    endif()

    # Cppcheck
    if(ENABLE_CPPCHECK)
        find_program(CPPCHECK cppcheck)
        if(CPPCHECK)
            message(STATUS "Enabling cppcheck for ${target}")
"#,
    );
    s.push_str(&format!(
        "            set_target_properties(${{target}} PROPERTIES\n                {prop}_CPPCHECK \"${{CPPCHECK}};--enable=all;--suppress=missingIncludeSystem;--inline-suppr;--inconclusive\"\n            )\n"
    ));
    s.push_str(
        r#"        else()
            message(WARNING "cppcheck not found")
        endif()
    endif()

    # Include-what-you-use
    if(ENABLE_IWYU)
        find_program(IWYU include-what-you-use)
        if(IWYU)
            message(STATUS "Enabling include-what-you-use for ${target}")
"#,
    );
    s.push_str(&format!(
        "            set_target_properties(${{target}} PROPERTIES\n                {prop}_INCLUDE_WHAT_YOU_USE \"${{IWYU}}\"\n            )\n"
    ));
    s.push_str(
        r#"        else()
            message(WARNING "include-what-you-use not found")
        endif()
    endif()
endfunction()
"#,
    );

    s
}

/// `cmake/Doxygen.cmake` — defines `enable_docs()`. Language-independent.
pub fn doxygen() -> String {
    r#"# Doxygen documentation configuration

option(BUILD_DOCS "Build documentation" OFF)

function(enable_docs)
    if(NOT BUILD_DOCS)
        return()
    endif()

    find_package(Doxygen REQUIRED OPTIONAL_COMPONENTS dot)

    if(DOXYGEN_FOUND)
        set(DOXYGEN_OUTPUT_DIRECTORY "${CMAKE_BINARY_DIR}/docs")
        set(DOXYGEN_GENERATE_HTML YES)
        set(DOXYGEN_GENERATE_MAN NO)
        set(DOXYGEN_EXTRACT_ALL YES)
        set(DOXYGEN_EXTRACT_PRIVATE YES)
        set(DOXYGEN_EXTRACT_STATIC YES)
        set(DOXYGEN_RECURSIVE YES)
        set(DOXYGEN_USE_MDFILE_AS_MAINPAGE "${CMAKE_SOURCE_DIR}/README.md")
        set(DOXYGEN_EXCLUDE_PATTERNS "*/build/*" "*/tests/*" "*/_deps/*")

        # Modern theme settings
        set(DOXYGEN_HTML_COLORSTYLE_HUE 209)
        set(DOXYGEN_HTML_COLORSTYLE_SAT 255)
        set(DOXYGEN_HTML_COLORSTYLE_GAMMA 113)

        doxygen_add_docs(docs
            ${CMAKE_SOURCE_DIR}/include
            ${CMAKE_SOURCE_DIR}/src
            ${CMAKE_SOURCE_DIR}/README.md
            COMMENT "Generating API documentation with Doxygen"
        )

        message(STATUS "Doxygen documentation target available: cmake --build build --target docs")
    else()
        message(WARNING "Doxygen not found. Documentation will not be generated.")
    endif()
endfunction()
"#
    .to_string()
}

/// `cmake/CPM.cmake` — the CPM.cmake bootstrap shim.
pub fn cpm_bootstrap() -> String {
    r#"# CPM.cmake - Package Manager
# https://github.com/cpm-cmake/CPM.cmake

set(CPM_DOWNLOAD_VERSION 0.38.7)

if(CPM_SOURCE_CACHE)
    set(CPM_DOWNLOAD_LOCATION "${CPM_SOURCE_CACHE}/cpm/CPM_${CPM_DOWNLOAD_VERSION}.cmake")
elseif(DEFINED ENV{CPM_SOURCE_CACHE})
    set(CPM_DOWNLOAD_LOCATION "$ENV{CPM_SOURCE_CACHE}/cpm/CPM_${CPM_DOWNLOAD_VERSION}.cmake")
else()
    set(CPM_DOWNLOAD_LOCATION "${CMAKE_BINARY_DIR}/cmake/CPM_${CPM_DOWNLOAD_VERSION}.cmake")
endif()

get_filename_component(CPM_DOWNLOAD_LOCATION ${CPM_DOWNLOAD_LOCATION} ABSOLUTE)

function(download_cpm)
    message(STATUS "Downloading CPM.cmake to ${CPM_DOWNLOAD_LOCATION}")
    file(DOWNLOAD
        https://github.com/cpm-cmake/CPM.cmake/releases/download/v${CPM_DOWNLOAD_VERSION}/CPM.cmake
        ${CPM_DOWNLOAD_LOCATION}
    )
endfunction()

if(NOT (EXISTS ${CPM_DOWNLOAD_LOCATION}))
    download_cpm()
endif()

include(${CPM_DOWNLOAD_LOCATION})
"#
    .to_string()
}

const fn compiler_id_var(language: Language) -> &'static str {
    match language {
        Language::C => "CMAKE_C_COMPILER_ID",
        Language::Cxx => "CMAKE_CXX_COMPILER_ID",
    }
}
